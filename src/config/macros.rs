/// Configuration macros for single-declaration config sections
///
/// `config_struct!` defines a configuration struct together with its field
/// defaults. It generates:
/// - the struct with public fields
/// - the `Default` implementation
/// - serde support with `#[serde(default)]`, so a partial TOML file only
///   overrides the fields it names
///
/// # Example
/// ```
/// wallet_sweeper::config_struct! {
///     pub struct ExampleConfig {
///         reserve_lamports: u64 = 2_000_000,
///         dry_run: bool = false,
///     }
/// }
/// ```
#[macro_export]
macro_rules! config_struct {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_name:ident: $field_type:ty = $default_value:expr
            ),*
            $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(default)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                pub $field_name: $field_type,
            )*
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $(
                        $field_name: $default_value,
                    )*
                }
            }
        }
    };
}
