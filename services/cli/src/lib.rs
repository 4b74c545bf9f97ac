mod assess;
mod batch;
mod cli;
mod render;

use job_worth::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
