//! Define command implementation.

use frontkit_config::{BuildConfiguration, DefineTable};

use crate::commands::utils;
use crate::config::Settings;
use crate::error::Result;

/// Execute the define command.
pub fn execute(settings: &Settings) -> Result<()> {
    let configs = utils::build_all(settings)?;
    print!("{}", render(&configs));
    Ok(())
}

/// Constant tables, each headed by its target when more than one is shown.
pub fn render(configs: &[BuildConfiguration]) -> String {
    let mut out = String::new();
    for config in configs {
        if configs.len() > 1 {
            out.push_str(&format!("# {}\n", config.axes.target()));
        }
        out.push_str(&format_table(&config.define));
    }
    out
}

/// `KEY = replacement` per line, in table order.
pub fn format_table(table: &DefineTable) -> String {
    table
        .iter()
        .map(|(key, value)| format!("{key} = {}\n", value.render()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontkit_config::DefineValue;

    #[test]
    fn test_format_table() {
        let table = DefineTable::new()
            .with("__DEV__", DefineValue::Bool(true))
            .with("__BUILD__", DefineValue::json("latest"))
            .with("__STATIC_PATH__", DefineValue::raw("/static/"));
        assert_eq!(
            format_table(&table),
            "__DEV__ = true\n__BUILD__ = \"latest\"\n__STATIC_PATH__ = /static/\n"
        );
    }
}
