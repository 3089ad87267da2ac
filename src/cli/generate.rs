use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    error::EgressError,
    net::DnsResolver,
    policy::{self, EgressNetworkPolicy, Polarity},
};

use super::args::{Args, OutputFormat};

/// Find destination files under `dir` matching `pattern`, paired with the
/// polarity declared by their extension
///
/// The glob iterator yields paths in alphabetical order, so discovery order
/// (and with it the rule order) is stable across runs. Matches whose
/// extension is neither `.allow` nor `.deny` are skipped.
pub fn discover_files(dir: &Path, pattern: &str) -> Result<Vec<(PathBuf, Polarity)>, EgressError> {
    let full_pattern = dir.join(pattern);
    let full_pattern = full_pattern.to_string_lossy();

    let mut files = Vec::new();
    let matches =
        glob::glob(&full_pattern).map_err(|source| EgressError::GlobPattern {
            pattern: full_pattern.to_string(),
            source,
        })?;

    for entry in matches {
        let path = entry?;
        let polarity = match path.extension().and_then(|ext| ext.to_str()) {
            Some("allow") => Polarity::Allow,
            Some("deny") => Polarity::Deny,
            _ => {
                log::debug!("ignoring {} (not .allow/.deny)", path.display());
                continue;
            }
        };
        files.push((path, polarity));
    }

    Ok(files)
}

/// Compile every discovered file and assemble the policy document
///
/// Files are processed strictly in discovery order, one at a time; an
/// unreadable file aborts the run. Hostname resolution happens inside the
/// per-file compilation and cannot reorder rules.
pub async fn build_policy<R: DnsResolver>(
    namespace: &str,
    files: &[(PathBuf, Polarity)],
    resolver: &R,
) -> Result<EgressNetworkPolicy, EgressError> {
    let mut per_file_rules = Vec::with_capacity(files.len());

    for (path, polarity) in files {
        let content = fs::read_to_string(path)?;
        let rules = policy::compile_file(&content, *polarity, resolver).await;
        log::info!(
            "compiled {} into {} rule(s)",
            path.display(),
            rules.len()
        );
        per_file_rules.push(rules);
    }

    Ok(policy::assemble(namespace, per_file_rules))
}

/// Serialize the document in the requested format
pub fn render(policy: &EgressNetworkPolicy, format: OutputFormat) -> Result<String, EgressError> {
    let mut rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(policy)?,
        OutputFormat::Yaml => serde_yaml::to_string(policy)?,
    };
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    Ok(rendered)
}

/// Run one policy generation pass end to end
pub async fn run<R: DnsResolver>(args: &Args, resolver: &R) -> Result<(), EgressError> {
    let files = discover_files(&args.dir, &args.glob)?;
    let policy = build_policy(&args.namespace, &files, resolver).await?;
    let rendered = render(&policy, args.output)?;

    match &args.write {
        Some(path) => fs::write(path, rendered)?,
        None => std::io::stdout().write_all(rendered.as_bytes())?,
    }

    Ok(())
}
