use crate::config::DeviceInfoConfig;
use crate::exec::CommandRunner;
use crate::template::ArgvTemplate;
use std::collections::HashMap;
use std::sync::Mutex;

/// A [`CommandRunner`] that answers by program name and records every argv.
#[derive(Debug, Default)]
pub(crate) struct ScriptedRunner {
    responses: HashMap<String, Option<String>>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl ScriptedRunner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Answer `program` with `output`.
    pub(crate) fn respond(mut self, program: &str, output: &str) -> Self {
        self.responses
            .insert(program.to_string(), Some(output.to_string()));
        self
    }

    /// Make `program` fail as if it produced no output.
    pub(crate) fn fail(mut self, program: &str) -> Self {
        self.responses.insert(program.to_string(), None);
        self
    }

    pub(crate) fn calls(&self) -> Vec<Vec<String>> {
        self.calls
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
            .clone()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, argv: &[String]) -> Option<String> {
        self.calls
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
            .push(argv.to_vec());
        argv.first()
            .and_then(|program| self.responses.get(program))
            .cloned()
            .flatten()
    }
}

/// A config whose probes run the scripted programs `uuid`, `size` and `rotation`.
pub(crate) fn scripted_config() -> DeviceInfoConfig {
    DeviceInfoConfig {
        uuid: ArgvTemplate::new(["uuid", "{ADB_SERIAL}"]),
        resolution: ArgvTemplate::new(["size", "{ADB_SERIAL}"]),
        orientation: ArgvTemplate::new(["rotation", "{ADB_SERIAL}"]),
        timeout_seconds: None,
    }
}
