//! Macros for ergonomic construction.

/// Generate State trait implementation for simple enums.
///
/// # Example
///
/// ```
/// use liquid_sort::state_enum;
///
/// state_enum! {
///     pub enum RoundState {
///         Pouring,
///         Settled,
///         Spilled,
///     }
///     final: [Settled, Spilled]
///     error: [Spilled]
/// }
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
        $(error: [$($error:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }

            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    _ => false,
                }
            }
        }
    };
}

/// Build a game from rows of sections, top first.
///
/// Expands to a [`GameBuilder`](crate::builder::GameBuilder) chain and
/// returns `Result<Game, BuildError>`.
///
/// # Example
///
/// ```
/// use liquid_sort::{game, GameState};
///
/// let game = game![
///     [0, 2, 1, 1],
///     [0, 3, 1, 1],
///     [0, 1, 1, 1],
/// ]
/// .unwrap();
///
/// assert_eq!(game.state(), GameState::Lost);
/// ```
#[macro_export]
macro_rules! game {
    ($([$($section:expr),* $(,)?]),* $(,)?) => {
        $crate::builder::GameBuilder::new()
            $(.beaker([$(i64::from($section)),*]))*
            .build()
    };
}
