//! The update-codes command-line executable.

fn main() -> anyhow::Result<()> {
    update_codes::run()
}
