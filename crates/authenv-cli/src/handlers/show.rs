//! Handler for the `show` command.

use std::fmt::Write as _;

use authenv_core::AuthorityEnvironmentManager;

/// Render the statements the manager would run, without connecting.
pub fn render(manager: &AuthorityEnvironmentManager) -> String {
    let mut out = String::new();
    let database_type = manager.database_type();

    let dialects = manager.definition().dialects();
    if !dialects.contains(&database_type) {
        let known: Vec<String> = dialects.iter().map(ToString::to_string).collect();
        let _ = writeln!(
            out,
            "No authority SQL for {database_type} (document covers: {})",
            if known.is_empty() {
                "nothing".to_string()
            } else {
                known.join(", ")
            }
        );
        return out;
    }

    for (label, sqls) in [("init", manager.init_sqls()), ("clean", manager.clean_sqls())] {
        let _ = writeln!(out, "{label} ({database_type}, {} statements):", sqls.len());
        for (i, sql) in sqls.iter().enumerate() {
            let _ = writeln!(out, "  {:>3}. {sql}", i + 1);
        }
    }
    out
}

/// Print the resolved statements to stdout.
pub fn execute(manager: &AuthorityEnvironmentManager) {
    print!("{}", render(manager));
}
