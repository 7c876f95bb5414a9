use anyhow::Context;
use tokenkit_common::logger;
use tokenkit_config::AddressRegistry;
use xshell::Shell;

use super::args::AddressesArgs;
use crate::messages::{msg_registry_empty, msg_registry_entries, MSG_READING_REGISTRY_ERR};

pub fn run(shell: &Shell, args: AddressesArgs) -> anyhow::Result<()> {
    let registry = AddressRegistry::new(shell.current_dir());
    let path = args.kind.registry_path();

    let entries = match registry.load(path) {
        Ok(entries) => entries,
        Err(err) if err.is_missing_file() => Vec::new(),
        Err(err) => return Err(err).context(MSG_READING_REGISTRY_ERR),
    };

    if entries.is_empty() {
        logger::warn(msg_registry_empty(args.kind, &registry.resolve(path)));
        return Ok(());
    }

    let listing = entries
        .iter()
        .enumerate()
        .map(|(index, address)| format!("{index}: {address}"))
        .collect::<Vec<_>>()
        .join("\n");
    logger::note(msg_registry_entries(args.kind, entries.len()), listing);
    Ok(())
}
