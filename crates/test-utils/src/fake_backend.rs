use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use ioclaunch::errors::Result;
use ioclaunch::exec::LaunchBackend;
use ioclaunch::plan::Invocation;

/// A fake backend that:
/// - records every invocation it is asked to start
/// - immediately "exits" with a fixed code.
#[derive(Debug, Clone)]
pub struct RecordingBackend {
    launched: Arc<Mutex<Vec<Invocation>>>,
    exit_code: i32,
}

impl RecordingBackend {
    pub fn new(exit_code: i32) -> Self {
        Self {
            launched: Arc::new(Mutex::new(Vec::new())),
            exit_code,
        }
    }

    /// Invocations seen so far, in launch order.
    pub fn launched(&self) -> Vec<Invocation> {
        self.launched.lock().unwrap().clone()
    }
}

impl LaunchBackend for RecordingBackend {
    fn launch(
        &mut self,
        invocation: Invocation,
    ) -> Pin<Box<dyn Future<Output = Result<i32>> + Send + '_>> {
        let launched = Arc::clone(&self.launched);
        let code = self.exit_code;

        Box::pin(async move {
            launched.lock().unwrap().push(invocation);
            Ok(code)
        })
    }
}
