use crate::commands::{load_config, CommandResult};

pub fn run() -> CommandResult {
    let config = match load_config("config") {
        Ok(config) => config,
        Err(result) => return result,
    };

    match serde_json::to_value(&config) {
        Ok(data) => CommandResult::success_with_data(
            "config",
            "effective configuration after defaults, file, and environment overrides",
            data,
        ),
        Err(error) => CommandResult::failure("config", "serialization", error.to_string(), 5),
    }
}
