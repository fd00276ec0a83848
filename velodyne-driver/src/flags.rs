use velodyne_data::ReturnMode;

pub(crate) fn to_return_mode(value: u8) -> ReturnMode {
    match value {
        0x37 => ReturnMode::Strongest,
        0x38 => ReturnMode::Last,
        0x39 => ReturnMode::Dual,
        _ => ReturnMode::Unknown(value),
    }
}
