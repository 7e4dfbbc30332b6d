use std::fs;

use intlgen::{ClassEmitter, Error, GeneratedClass, ResourceCollection, traits::ModelFile};

use crate::config::Config;

/// Reads the model named by `config`, emits the class and writes it to the configured
/// output. Without an output path the source is printed to stdout.
pub fn run_generate(config: &Config) -> Result<GeneratedClass, Error> {
    let input = config.input()?;
    let collection = ResourceCollection::load(input)?;
    tracing::info!(
        input = %input.display(),
        locales = collection.tables.len(),
        "read resource model"
    );

    let generated = ClassEmitter::new(config.emitter.clone()).emit(&collection)?;
    for missing in &generated.missing {
        tracing::info!(key = %missing.key, locale = %missing.locale, "missing translation");
    }

    match &config.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, &generated.source)?;
        }
        None => print!("{}", generated.source),
    }

    Ok(generated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use intlgen::{Locale, LocaleTable};
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_run_generate_writes_output() {
        let temp_dir = TempDir::new().unwrap();
        let model = temp_dir.path().join("model.json");
        ResourceCollection::new(
            Locale::new("en"),
            vec![
                LocaleTable::new(Locale::new("en")).with_string("hello", "Hello"),
                LocaleTable::new(Locale::new("fr")),
            ],
        )
        .save(&model)
        .unwrap();

        let output = temp_dir.path().join("lib/generated/s.dart");
        let config = Config::default().with_overrides(Some(model), Some(output.clone()), None);
        let generated = run_generate(&config).unwrap();

        assert_eq!(generated.accessor_count, 1);
        assert_eq!(generated.missing.len(), 1);
        assert_eq!(fs::read_to_string(output).unwrap(), generated.source);
    }

    #[test]
    fn test_run_generate_missing_model() {
        let config = Config::default().with_overrides(
            Some(PathBuf::from("/nonexistent/model.json")),
            None,
            None,
        );
        assert!(matches!(run_generate(&config), Err(Error::Io(_))));
    }
}
