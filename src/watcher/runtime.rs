use chrono::{DateTime, Local, Timelike};

#[derive(Debug, Copy, Clone)]
pub struct Runtime {
    pub deploy_time: DateTime<Local>,
}

impl Runtime {
    pub fn new() -> Self {
        Self {
            deploy_time: {
                let now = Local::now();
                now.with_nanosecond(0).unwrap_or(now)
            },
        }
    }
}
