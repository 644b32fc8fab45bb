use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::ComposeRunner;

/// Compose runner that records invocations instead of running docker.
#[derive(Default)]
pub struct FakeComposeRunner {
    pub calls: Mutex<Vec<String>>,
    pub ps_output: Mutex<String>,
}

impl FakeComposeRunner {
    pub fn with_ps_output(output: &str) -> Self {
        Self { calls: Mutex::new(Vec::new()), ps_output: Mutex::new(output.to_string()) }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

impl ComposeRunner for FakeComposeRunner {
    fn up(&self) -> Result<(), AppError> {
        self.record("up".into());
        Ok(())
    }

    fn ps(&self) -> Result<String, AppError> {
        self.record("ps".into());
        Ok(self.ps_output.lock().unwrap().clone())
    }

    fn logs(&self, service: Option<&str>, follow: bool) -> Result<(), AppError> {
        let mut call = String::from("logs");
        if let Some(service) = service {
            call.push(' ');
            call.push_str(service);
        }
        if follow {
            call.push_str(" -f");
        }
        self.record(call);
        Ok(())
    }
}
