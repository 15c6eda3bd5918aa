pub mod device_configs;
