//! This module contains the macros used in the project.

/// prompt for a missing config value, persist it and return it
macro_rules! config_value {
    ($config:ident, $setting_name:ident, $struct_name:ident, $key_name:ident, $string:expr) => {{
        println!(concat!("Please enter ", $string, ":"));
        let value = $crate::utils::input()?;
        let cloned_value = value.clone();
        $config.update(|config_data| {
            if let Some(local_config) = config_data.$setting_name.as_mut() {
                local_config.$key_name = Some(cloned_value);
            } else {
                config_data.$setting_name = Some($struct_name {
                    $key_name: Some(cloned_value),
                    ..Default::default()
                });
            }
        })?;
        value
    }};
}

/// load a config value, prompting when missing
macro_rules! config_value_wrap {
    ($config:ident, $setting_name:ident, $struct_name:ident, $key_name:ident, $string:expr) => {
        match &$config.config_data.$setting_name {
            Some(c) => match &c.$key_name {
                Some(u) => u.clone(),
                None => {
                    $crate::macros::config_value!(
                        $config,
                        $setting_name,
                        $struct_name,
                        $key_name,
                        $string
                    )
                }
            },
            None => {
                $crate::macros::config_value!(
                    $config,
                    $setting_name,
                    $struct_name,
                    $key_name,
                    $string
                )
            }
        }
    };
}

/// prompt for a missing secret config value without echo, persist it and
/// return it
macro_rules! config_password {
    ($config:ident, $setting_name:ident, $struct_name:ident, $key_name:ident, $string:expr) => {{
        println!(concat!("Please enter ", $string, ":"));
        let value = $crate::utils::get_password()?;
        let cloned_value = value.clone();
        $config.update(|config_data| {
            if let Some(local_config) = config_data.$setting_name.as_mut() {
                local_config.$key_name = Some(cloned_value);
            } else {
                config_data.$setting_name = Some($struct_name {
                    $key_name: Some(cloned_value),
                    ..Default::default()
                });
            }
        })?;
        value
    }};
}

/// load a secret config value, prompting without echo when missing
macro_rules! config_password_wrap {
    ($config:ident, $setting_name:ident, $struct_name:ident, $key_name:ident, $string:expr) => {
        match &$config.config_data.$setting_name {
            Some(c) => match &c.$key_name {
                Some(u) => u.clone(),
                None => {
                    $crate::macros::config_password!(
                        $config,
                        $setting_name,
                        $struct_name,
                        $key_name,
                        $string
                    )
                }
            },
            None => {
                $crate::macros::config_password!(
                    $config,
                    $setting_name,
                    $struct_name,
                    $key_name,
                    $string
                )
            }
        }
    };
}

pub(crate) use config_password;
pub(crate) use config_password_wrap;
pub(crate) use config_value;
pub(crate) use config_value_wrap;
