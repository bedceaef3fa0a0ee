use mini_crm::cli;
use mini_crm::errors::AppError;

fn main() -> Result<(), AppError> {
    cli::run_app()
}
