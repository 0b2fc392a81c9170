use contact_book::logging::init_tracing;
use contact_book::prelude::{AppError, run_app};

fn main() -> Result<(), AppError> {
    init_tracing();
    run_app()
}
