pub mod ports;
pub mod youth_indicators_use_case;
