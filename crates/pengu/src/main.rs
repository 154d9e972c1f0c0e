use std::process::ExitCode;

use pengu_engine::device::GpuInit;
use pengu_engine::logging::{init_logging, LoggingConfig};
use pengu_engine::window::{IconPolicy, Runtime, RuntimeConfig};

mod app;
mod cycle;

use app::ColorCycle;

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "Pengu".to_string(),
        width: 640,
        height: 480,
        icon: IconPolicy::Default,
        ..RuntimeConfig::default()
    };

    let result = Runtime::run(config, GpuInit::default(), ColorCycle::default());
    ExitCode::from(exit_code_of(&result))
}

/// 0 on normal quit. Errors were already reported by the runtime's log sink.
fn exit_code_of(result: &anyhow::Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes() {
        assert_eq!(exit_code_of(&Ok(())), 0);
        assert_eq!(exit_code_of(&Err(anyhow::anyhow!("no display"))), 1);
    }
}
