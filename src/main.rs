mod entry;

use loadpulse::error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
