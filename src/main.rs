use anyhow::Result;

use viaris::ui::cli::Wizard;

fn main() -> Result<()> {
    Wizard::run()
}
