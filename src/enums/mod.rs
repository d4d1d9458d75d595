/// Declares a categorical survey enum whose serde, `Display` and `FromStr`
/// forms are all the given wire string.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, field = $field:literal {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ::serde::Serialize, ::serde::Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::errors::PrioritizerError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($wire => Ok($name::$variant),)+
                    other => {
                        let allowed: Vec<&str> = $name::ALL.iter().map($name::as_str).collect();
                        Err($crate::errors::PrioritizerError::validation_error(
                            $field,
                            other,
                            &format!("one of: {}", allowed.join(", ")),
                            None,
                        ))
                    }
                }
            }
        }
    };
}

pub mod active_deals;
pub mod commands;
pub mod initiator;
pub mod interaction_frequency;
pub mod priority_level;
pub mod proposal_status;
pub mod sentiment;
