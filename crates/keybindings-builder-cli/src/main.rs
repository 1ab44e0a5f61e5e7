// kbb entry point

use keybindings_builder_cli::{output, CommandRouter};

#[tokio::main]
async fn main() {
    if let Err(e) = CommandRouter::route().await {
        tracing::debug!("{:?}", e);
        output::print_error(&e.user_message());
        std::process::exit(e.exit_code());
    }
}
