pub mod callback;
pub mod general_message;
pub mod message;

use teloxide::{dispatching::UpdateHandler, prelude::*};

use crate::bot::commands::Command;

pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;
pub type HandlerResult = Result<(), HandlerError>;

/// Update routing tree.
///
/// Endpoints receive the shared `Arc<TruthOrDare>` from the dispatcher's
/// dependency map.
pub fn schema() -> UpdateHandler<HandlerError> {
    dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(message::command_handler),
        )
        .branch(Update::filter_message().endpoint(general_message::handle_general_message))
        .branch(Update::filter_callback_query().endpoint(callback::callback_handler))
}
