//! Guided selection session.
//!
//! A session walks the user through three steps (area, shape, door placement)
//! and then shows the ranked results:
//!
//! - [`WizardState`]: Explicit state machine for the guided flow
//! - [`Configurator`]: Owns filters, wizard position, sort mode and selection
//! - [`LiveSession`]: Applies filter edits after a quiet period
//! - [`Debouncer`]: Cancellable timer used for the quiet period
//!
//! Entry and storage selections only narrow the results once the door step has
//! been reached or the results view is open.
//!
//! [`WizardState`]: wizard::WizardState
//! [`Configurator`]: configurator::Configurator
//! [`LiveSession`]: live::LiveSession
//! [`Debouncer`]: debounce::Debouncer

pub mod configurator;
pub mod debounce;
pub mod live;
pub mod view;
pub mod wizard;
