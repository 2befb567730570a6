use simplelog::{Color, Config, ConfigBuilder, Level, LevelFilter};

/// Logger settings for this crate: only `symcore` records, no time stamps,
/// with canonicalization (`debug`) and arithmetic (`trace`) coloured apart.
pub fn logger_config() -> Config {
    let mut cb = ConfigBuilder::new();
    cb.add_filter_allow_str(env!("CARGO_PKG_NAME"));
    cb.set_time_level(LevelFilter::Off);
    cb.set_location_level(LevelFilter::Off);
    cb.set_target_level(LevelFilter::Off);
    cb.set_thread_level(LevelFilter::Off);
    cb.set_level_color(Level::Debug, Some(Color::Cyan));
    cb.set_level_color(Level::Trace, Some(Color::Green));
    cb.build()
}

pub fn init_simple_logger(l: log::LevelFilter) -> Result<(), log::SetLoggerError> {
    use simplelog::{ColorChoice, TermLogger, TerminalMode};

    TermLogger::init(
        l,
        logger_config(),
        TerminalMode::Mixed,
        ColorChoice::Auto
    )
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use log::{Log, Record};
    use simplelog::WriteLogger;

    use super::*;
    use crate::{symbol, udict, Symbol, ToBasic, UIntPoly};

    #[derive(Clone, Default)]
    struct Sink(Arc<Mutex<Vec<u8>>>);

    impl Write for Sink {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl Sink {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn config_keeps_crate_records_only() {
        let sink = Sink::default();
        let logger = WriteLogger::new(LevelFilter::Trace, logger_config(), sink.clone());

        logger.log(&Record::builder()
            .level(Level::Debug)
            .target("symcore::poly::mpoly")
            .args(format_args!("prune variables: 3 -> 2"))
            .build()
        );
        logger.log(&Record::builder()
            .level(Level::Debug)
            .target("other_crate")
            .args(format_args!("unrelated"))
            .build()
        );

        let text = sink.text();
        assert!(text.contains("prune variables: 3 -> 2"));
        assert!(!text.contains("unrelated"));
    }

    #[test]
    fn logging_during_arithmetic() {
        // a logger may already be installed by another test.
        let _ = init_simple_logger(log::LevelFilter::Trace);

        let x = Symbol::new("x");
        let p = UIntPoly::from_terms(x.clone(), udict!{ 0 => 1, 1 => 2, 2 => 1 });
        let q = UIntPoly::from_terms(x, udict!{ 0 => 1, 1 => 1 });
        let r = crate::mul_upoly(&p, &q).unwrap();

        assert_eq!(r.degree(), 3);
        assert_ne!(r.to_basic(), symbol("x"));
    }
}
