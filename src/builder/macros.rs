//! Macros for declaring states and events with minimal boilerplate.

/// Declare a unit-variant enum and implement `State` for it, naming each
/// state after its variant.
///
/// # Example
///
/// ```
/// use waypoint::core::State;
/// use waypoint::state_enum;
///
/// state_enum! {
///     pub enum WorkflowState {
///         Start,
///         Processing,
///         Done,
///     }
/// }
///
/// assert_eq!(WorkflowState::Processing.name(), "Processing");
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
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
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
        }
    };
}

/// Declare a unit-variant enum usable as an event, displayed as its
/// variant name so it labels exported graph edges.
///
/// # Example
///
/// ```
/// use waypoint::event_enum;
///
/// event_enum! {
///     pub enum DoorEvent {
///         Open,
///         Close,
///     }
/// }
///
/// assert_eq!(DoorEvent::Close.to_string(), "Close");
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let label = match self {
                    $(Self::$variant => stringify!($variant)),*
                };
                f.pad(label)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Event, State};

    state_enum! {
        enum TestState {
            Initial,
            Processing,
            Complete,
        }
    }

    event_enum! {
        enum TestEvent {
            Begin,
            /// Documented variants are accepted
            End,
        }
    }

    fn assert_event<E: Event>(_event: E) {}

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(TestState::Initial.name(), "Initial");
        assert_eq!(TestState::Processing.name(), "Processing");
        assert_eq!(TestState::Complete.name(), "Complete");
    }

    #[test]
    fn state_enum_supports_visibility() {
        state_enum! {
            pub enum PublicState {
                A,
                B,
            }
        }

        assert_eq!(PublicState::B.name(), "B");
        assert_ne!(PublicState::A, PublicState::B);
    }

    #[test]
    fn event_enum_displays_variant_name() {
        assert_eq!(TestEvent::Begin.to_string(), "Begin");
        assert_eq!(format!("{}", TestEvent::End), "End");
        assert_event(TestEvent::End);
    }
}
