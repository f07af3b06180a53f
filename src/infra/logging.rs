use std::fs::File;
use std::io;
use std::path::Path;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};

/// Настроить логирование для бинарника: терминал на уровне `level`,
/// плюс подробный (Debug) лог в файл, если путь задан.
///
/// Библиотека сама логгер не ставит – только пишет через `log`.
/// Повторный вызов возвращает ошибку: логгер уже установлен.
pub fn init(level: LevelFilter, file: Option<&Path>) -> io::Result<()> {
    let config = ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        config.clone(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];

    if let Some(path) = file {
        loggers.push(WriteLogger::new(LevelFilter::Debug, config, File::create(path)?));
    }

    // Глобальный логгер ставится один раз; повтор – ошибка AlreadyExists.
    CombinedLogger::init(loggers)
        .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_reported() {
        assert!(init(LevelFilter::Off, None).is_ok());
        let err = init(LevelFilter::Off, None).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
    }
}
