//! Commands behind the `centaur` binary.

pub mod error;
pub mod logging;

pub use error::{CliError, Result};

use centaur_codegen::{CodeGenerator, GeneratorOptions, WebGenerator};
use centaur_core::{CentaurError, InputError, Program};
use centaur_parser::parse_document;
use std::fs;
use std::path::{Path, PathBuf};

/// Output directory used when none is given.
pub const DEFAULT_OUTPUT_DIR: &str = "./dist";

/// Project name used by `init` when none is given.
pub const DEFAULT_PROJECT_NAME: &str = "centaur-project";

const SOURCE_EXTENSION: &str = "centaur";

/// Read and parse a source file, rejecting empty input.
pub fn load_program(input: &Path) -> Result<Program> {
    if input.extension().and_then(|e| e.to_str()) != Some(SOURCE_EXTENSION) {
        log::warn!("{} does not have a .{} extension", input.display(), SOURCE_EXTENSION);
    }

    let source = fs::read_to_string(input).map_err(|source| InputError::Unreadable {
        path: input.to_path_buf(),
        source,
    })?;
    let program = parse_document(&source)?;

    log::info!(
        "parsed {} component(s) from {}",
        program.components.len(),
        input.display()
    );
    Ok(program)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|source| CentaurError::Output {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| CentaurError::Output {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Compile a source file into `<Name>.html/.css/.js` per component.
///
/// Returns the written paths in component order.
pub fn compile(input: &Path, output_dir: &Path, options: GeneratorOptions) -> Result<Vec<PathBuf>> {
    let program = load_program(input)?;
    let generator = WebGenerator::with_options(options).map_err(|err| CentaurError::Codegen {
        component: "templates".to_string(),
        reason: err.to_string(),
    })?;

    create_dir(output_dir)?;

    let mut written = Vec::new();
    for component in &program.components {
        let generated = generator
            .generate(component)
            .map_err(|err| CentaurError::Codegen {
                component: component.name.clone(),
                reason: err.to_string(),
            })?;
        for file in generated.files() {
            let path = output_dir.join(&file.path);
            write_file(&path, file.content)?;
            log::debug!("wrote {}", path.display());
            written.push(path);
        }
    }
    Ok(written)
}

/// Parsed program of a source file as pretty-printed JSON.
pub fn inspect(input: &Path) -> Result<String> {
    let program = load_program(input)?;
    Ok(serde_json::to_string_pretty(&program)?)
}

fn starter_source(project: &str) -> String {
    format!(
        r#"// {project} - Main Component

@component Main
@theme dark
@accent gold
@responsive true

{{
  Create a welcome section with:

  Fields:
  - Name input (required, placeholder "Enter your name")
  - Email input (required, validate email format)

  Submit button:
  - Text: "Get Started"

  Behavior:
  - Validate on submit
  - On success: show "Welcome aboard!" toast
}}
"#
    )
}

fn readme(project: &str) -> String {
    format!(
        "# {project}\n\n## Getting Started\n\n```bash\ncentaur compile src/Main.centaur dist/\n```\n\nOpen `dist/Main.html` in a browser to see the result.\n"
    )
}

/// Create a starter project under `parent`: `src/Main.centaur`, an empty
/// `dist/` and a README.
///
/// Refuses to overwrite an existing project directory.
pub fn init(parent: &Path, project: &str) -> Result<PathBuf> {
    let root = parent.join(project);
    if root.exists() {
        return Err(CliError::AlreadyExists(root));
    }

    create_dir(&root.join("src"))?;
    create_dir(&root.join("dist"))?;

    let main = root.join("src").join("Main.centaur");
    write_file(&main, &starter_source(project))?;
    write_file(&root.join("README.md"), &readme(project))?;

    log::info!("initialized project {}", root.display());
    Ok(main)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_source(dir: &Path, name: &str, source: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, source).unwrap();
        path
    }

    #[test]
    fn test_compile_writes_three_files_per_component() {
        let dir = tempdir().unwrap();
        let input = write_source(
            dir.path(),
            "site.centaur",
            "@component Login\n@type form\n{\n- Email input\n}\n@component Top\n{\nhero banner\n}",
        );
        let out = dir.path().join("dist");

        let written = compile(&input, &out, GeneratorOptions::default()).unwrap();
        let names: Vec<_> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec!["Login.html", "Login.css", "Login.js", "Top.html", "Top.css", "Top.js"]
        );

        let html = fs::read_to_string(out.join("Login.html")).unwrap();
        assert!(html.contains("field-email"));
    }

    #[test]
    fn test_compile_rejects_empty_source() {
        let dir = tempdir().unwrap();
        let input = write_source(dir.path(), "empty.centaur", "  \n");
        let err = compile(&input, dir.path(), GeneratorOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            CliError::Centaur(CentaurError::Input(InputError::Empty))
        ));
    }

    #[test]
    fn test_missing_input_is_unreadable() {
        let dir = tempdir().unwrap();
        let err = inspect(&dir.path().join("missing.centaur")).unwrap_err();
        assert!(matches!(
            err,
            CliError::Centaur(CentaurError::Input(InputError::Unreadable { .. }))
        ));
    }

    #[test]
    fn test_inspect_prints_program_json() {
        let dir = tempdir().unwrap();
        let input = write_source(dir.path(), "faq.centaur", "@component Faq\n@type faq\n{\nQ: Why?\nA: Because.\n}");
        let json = inspect(&input).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["components"][0]["name"], "Faq");
        assert_eq!(value["components"][0]["kind"], "accordion");
        assert_eq!(value["components"][0]["items"][0]["item"], "accordionEntry");
        assert_eq!(value["components"][0]["items"][0]["title"], "Why?");
    }

    #[test]
    fn test_init_creates_starter_project() {
        let dir = tempdir().unwrap();
        let main = init(dir.path(), "my-site").unwrap();
        assert_eq!(main, dir.path().join("my-site/src/Main.centaur"));
        assert!(dir.path().join("my-site/dist").is_dir());
        assert!(dir.path().join("my-site/README.md").is_file());

        let program = load_program(&main).unwrap();
        assert_eq!(program.components[0].name, "Main");
        assert!(!program.components[0].fields.is_empty());
    }

    #[test]
    fn test_init_refuses_existing_directory() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("taken")).unwrap();
        assert!(matches!(
            init(dir.path(), "taken"),
            Err(CliError::AlreadyExists(_))
        ));
    }
}
