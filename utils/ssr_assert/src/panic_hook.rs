//! Panic hook that prints halting diagnostics.
//!
//! Bug and usage assertions panic with a [`ProjectError`] payload, which the
//! default hook can only show as `Box<dyn Any>`. The hook installed here prints
//! the tagged message and its stack instead, and hands every other payload to
//! the hook that was active before.

use std::any::Any;
use std::sync::Once;

use crate::ProjectError;

static HOOK_INIT: Once = Once::new();

/// Chain the diagnostic hook in front of the current one. Runs once per process.
pub(crate) fn install() {
    HOOK_INIT.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| match render(info.payload()) {
            Some(stack) => eprintln!("{stack}"),
            None => previous(info),
        }));
    });
}

/// The text printed for a panic payload, if it is one of ours.
pub(crate) fn render(payload: &dyn Any) -> Option<&str> {
    payload.downcast_ref::<ProjectError>().map(ProjectError::stack)
}

#[cfg(test)]
mod tests;
