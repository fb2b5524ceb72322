//! End-to-end tests for the graft binary

use assert_cmd::cargo;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

fn graft_cli() -> Command {
    Command::new(cargo::cargo_bin!("graft"))
}

const CONFIG: &str = r#"
output = "src/generated.rs"

[[model]]
type = "TestTable"
name = "test_table"

[[model.field]]
ident = "id"
type = "i32"

[[model.field]]
ident = "jsonb_col"
type = "Option<Meta>"
json = true

[[model.field]]
ident = "owner"
type = "Option<Owner>"
relation = true

[[model]]
type = "Owner"

[[model.field]]
ident = "email"
type = "Option<String>"
"#;

fn project() -> TempDir {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("graft.toml"), CONFIG).unwrap();
    temp
}

mod init {
    use super::*;

    #[test]
    fn creates_config_file() {
        let temp = TempDir::new().unwrap();

        graft_cli()
            .current_dir(temp.path())
            .arg("init")
            .assert()
            .success()
            .stdout(predicate::str::contains("Created graft.toml"));

        let content = std::fs::read_to_string(temp.path().join("graft.toml")).unwrap();
        assert!(content.contains("[[model]]"));
    }

    #[test]
    fn fails_if_config_exists() {
        let temp = project();

        graft_cli()
            .current_dir(temp.path())
            .arg("init")
            .assert()
            .failure()
            .stderr(predicate::str::contains("already exists"));
    }

    #[test]
    fn init_then_check() {
        let temp = TempDir::new().unwrap();
        graft_cli().current_dir(temp.path()).arg("init").assert().success();

        graft_cli()
            .current_dir(temp.path())
            .arg("check")
            .assert()
            .success()
            .stdout(predicate::str::contains("User"));
    }
}

mod check {
    use super::*;

    #[test]
    fn lists_models() {
        let temp = project();

        graft_cli()
            .current_dir(temp.path())
            .arg("check")
            .assert()
            .success()
            .stdout(predicate::str::contains("TestTable"))
            .stdout(predicate::str::contains("jsonb_col"));
    }

    #[test]
    fn missing_config() {
        let temp = TempDir::new().unwrap();

        graft_cli()
            .current_dir(temp.path())
            .arg("check")
            .assert()
            .failure()
            .stderr(predicate::str::contains("config not found"));
    }

    #[test]
    fn unknown_relation() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.toml");
        std::fs::write(
            &path,
            "[[model]]\ntype = \"Item\"\n[[model.field]]\nident = \"owner\"\ntype = \"Owner\"\nrelation = true\n",
        )
        .unwrap();

        graft_cli()
            .arg("check")
            .arg("--config")
            .arg(&path)
            .assert()
            .failure()
            .stderr(predicate::str::contains("undeclared model `Owner`"));
    }
}

mod generate {
    use super::*;

    #[test]
    fn writes_requested_types_and_relations() {
        let temp = project();

        graft_cli()
            .current_dir(temp.path())
            .args(["generate", "--types", "TestTable"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Generated 2 model(s)"));

        let code = std::fs::read_to_string(temp.path().join("src/generated.rs")).unwrap();
        assert!(code.starts_with("// generated by graft. DO NOT EDIT."));
        assert!(code.contains("impl graft::Model for TestTable"));
        assert!(code.contains("impl graft::Model for Owner"));
        assert!(code.contains("pub fn jsonb_col_var<T: graft::JsonVarType>"));
        assert!(code.contains("pub fn owner("));
    }

    #[test]
    fn output_override() {
        let temp = project();
        let out = temp.path().join("out").join("models.rs");

        graft_cli()
            .current_dir(temp.path())
            .args(["generate", "--types", "Owner", "--output"])
            .arg(&out)
            .assert()
            .success();

        let code = std::fs::read_to_string(&out).unwrap();
        assert!(code.contains("impl graft::Model for Owner"));
        assert!(!code.contains("TestTable"));
    }

    #[test]
    fn unknown_types_warn() {
        let temp = project();

        graft_cli()
            .current_dir(temp.path())
            .args(["generate", "--types", "Missing,Owner"])
            .assert()
            .success()
            .stderr(predicate::str::contains("type `Missing` not found in schema, skipping"));
    }

    #[test]
    fn nothing_generated_fails() {
        let temp = project();

        graft_cli()
            .current_dir(temp.path())
            .args(["generate", "--types", "Missing"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Nothing to generate"));

        assert!(!temp.path().join("src/generated.rs").exists());
    }
}
