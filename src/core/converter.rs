//! Markdown changelog to reStructuredText sync
//!
//! Runs m2r2 over CHANGELOG.md, normalizes the title block and places the
//! result under docs/.

use crate::{
    config::{Config, ConverterConfig},
    error::{ReleaseError, Result},
    utils::{fs::FileSystemUtils, process::ProcessRunner},
};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Title block every docs changelog starts with
pub const RST_HEADER: &str = "Changelog\n=========\n\n";

/// Something that turns a markdown file into a sibling `.rst` file
pub trait MarkupConverter {
    /// Fail with [`ReleaseError::MissingDependency`] if the tool cannot run here
    fn ensure_available(&self) -> Result<()>;

    /// Convert `input`, overwriting any previous output
    fn convert(&self, input: &Path) -> Result<()>;
}

/// m2r2 invoked as a Python module
#[derive(Debug)]
pub struct M2r2Converter {
    settings: ConverterConfig,
    work_dir: PathBuf,
    process_runner: ProcessRunner,
}

impl M2r2Converter {
    #[must_use]
    pub const fn new(settings: ConverterConfig, work_dir: PathBuf, debug: bool) -> Self {
        Self {
            settings,
            work_dir,
            process_runner: ProcessRunner::new(debug),
        }
    }

    fn install_hint(&self) -> String {
        format!(
            "   Install with: uv pip install {module}\n   \
             Or add to dev dependencies: pip install -e \".[dev]\"",
            module = self.settings.module
        )
    }
}

impl MarkupConverter for M2r2Converter {
    #[instrument(skip(self))]
    fn ensure_available(&self) -> Result<()> {
        let python = self.settings.python.as_str();
        let module = self.settings.module.as_str();

        if !self.process_runner.command_exists(python) {
            return Err(ReleaseError::missing_dependency(
                format!("{module} (interpreter '{python}' not found)"),
                self.install_hint(),
            ));
        }

        let import = format!("import {module}");
        let import_check = self
            .process_runner
            .capture_command_in(&self.work_dir, python, &["-c", &import])?;

        if !import_check.success {
            debug!("Import check failed: {}", import_check.stderr.trim());
            return Err(ReleaseError::missing_dependency(
                module,
                self.install_hint(),
            ));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    fn convert(&self, input: &Path) -> Result<()> {
        let input = input.to_string_lossy();
        self.process_runner.run_command_in(
            &self.work_dir,
            &self.settings.python,
            &[
                "-m",
                &self.settings.module,
                &input,
                &self.settings.overwrite_flag,
            ],
        )?;
        Ok(())
    }
}

/// Converts CHANGELOG.md and syncs it into the docs tree
pub struct ChangelogConverter<C = M2r2Converter> {
    config: Config,
    converter: C,
    fs_utils: FileSystemUtils,
}

impl ChangelogConverter<M2r2Converter> {
    /// Create a changelog converter backed by m2r2
    pub fn new(config: Config) -> Self {
        let converter =
            M2r2Converter::new(config.converter.clone(), config.root.clone(), config.debug);
        Self::with_converter(config, converter)
    }
}

impl<C: MarkupConverter> ChangelogConverter<C> {
    /// Create a changelog converter around any markup converter
    pub fn with_converter(config: Config, converter: C) -> Self {
        Self {
            config,
            converter,
            fs_utils: FileSystemUtils::new(),
        }
    }

    /// Convert the markdown changelog and write the docs copy
    ///
    /// Returns the path of the written docs changelog.
    #[instrument(skip(self))]
    pub fn sync(&self) -> Result<PathBuf> {
        let source = &self.config.changelog_md;
        if !self.fs_utils.is_file(source) {
            return Err(ReleaseError::missing_input(
                format!("{} not found", self.config.display_path(source)),
                source,
            ));
        }

        self.converter.ensure_available()?;

        info!("Converting {}", source.display());
        self.converter.convert(source)?;

        let generated = self.config.converter_output();
        if !self.fs_utils.is_file(&generated) {
            return Err(ReleaseError::missing_output(
                format!("{} conversion failed", self.config.converter.module),
                generated,
            ));
        }

        let content = self
            .fs_utils
            .read_file_to_string(&generated)
            .map_err(|e| ReleaseError::file_system("read", &generated, e))?;

        let target = &self.config.changelog_rst;
        self.fs_utils
            .write_file(target, with_header(content))
            .map_err(|e| ReleaseError::file_system("write", target, e))?;

        self.fs_utils
            .remove_file_if_exists(&generated)
            .map_err(|e| ReleaseError::file_system("remove", &generated, e))?;

        info!("Synced {} -> {}", source.display(), target.display());
        Ok(target.clone())
    }
}

/// Prepend [`RST_HEADER`] unless the document already opens with it
pub fn with_header(content: String) -> String {
    if content.starts_with(RST_HEADER.trim_end()) {
        content
    } else {
        let mut titled = String::with_capacity(RST_HEADER.len() + content.len());
        titled.push_str(RST_HEADER);
        titled.push_str(&content);
        titled
    }
}
