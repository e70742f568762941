//! Descripteur d'entrée et validation du répertoire de contexte

use crate::error::{EtlError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Clés exactes attendues dans `input.json`
pub const INPUT_KEYS: [&str; 2] = ["context_path", "results_path"];

/// Contenu validé de `input.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputDescriptor {
    pub context_path: PathBuf,
    pub results_path: PathBuf,
}

/// Chemins résolus d'un participant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInput {
    pub context_path: PathBuf,
    pub json_path: PathBuf,
    pub txt_path: PathBuf,
    pub results_path: PathBuf,
    pub participant_id: String,
}

impl InputDescriptor {
    /// Valide un document `input.json` déjà parsé
    ///
    /// L'objet doit contenir exactement `context_path` et `results_path`,
    /// deux chaînes non vides.
    pub fn from_value(value: &Value) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| EtlError::InvalidInput("un objet JSON est attendu".to_string()))?;

        if object.len() != INPUT_KEYS.len() || !INPUT_KEYS.iter().all(|k| object.contains_key(*k)) {
            let keys: Vec<&str> = object.keys().map(String::as_str).collect();
            return Err(EtlError::InvalidInput(format!(
                "clés attendues {INPUT_KEYS:?}, trouvées {keys:?}"
            )));
        }

        let non_empty = |key: &str| -> Result<PathBuf> {
            match object.get(key).and_then(Value::as_str) {
                Some(s) if !s.trim().is_empty() => Ok(PathBuf::from(s)),
                _ => Err(EtlError::InvalidInput(format!("{key} doit être une chaîne non vide"))),
            }
        };

        Ok(Self {
            context_path: non_empty("context_path")?,
            results_path: non_empty("results_path")?,
        })
    }

    /// Lit et valide un fichier `input.json`
    pub fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&content)?;
        Self::from_value(&value)
    }
}

/// Le répertoire de contexte doit exister
pub fn validate_context_path(path: &Path) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(EtlError::InvalidContext(format!("{} n'est pas un répertoire", path.display())))
    }
}

/// Le répertoire de résultats doit exister, ou son parent doit exister
pub fn validate_results_path(path: &Path) -> Result<()> {
    if path.exists() {
        if path.is_dir() {
            return Ok(());
        }
        return Err(EtlError::InvalidResultsPath(format!(
            "{} existe et n'est pas un répertoire",
            path.display()
        )));
    }

    let parent = match path.parent() {
        Some(p) if p.as_os_str().is_empty() => Path::new("."),
        Some(p) => p,
        None => {
            return Err(EtlError::InvalidResultsPath(format!("{} sans parent", path.display())));
        }
    };

    if parent.is_dir() {
        Ok(())
    } else {
        Err(EtlError::InvalidResultsPath(format!(
            "le parent de {} n'existe pas",
            path.display()
        )))
    }
}

fn extension_lower(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
}

/// Trouve la paire `.json` / `.txt` du répertoire de contexte
///
/// Le répertoire doit contenir exactement deux fichiers, un de chaque
/// extension, avec le même nom de base.
pub fn context_files(context: &Path) -> Result<(PathBuf, PathBuf)> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(context)? {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        }
    }

    if files.len() != 2 {
        return Err(EtlError::InvalidContext(format!(
            "2 fichiers attendus dans {}, {} trouvés",
            context.display(),
            files.len()
        )));
    }

    let find = |ext: &str| files.iter().find(|f| extension_lower(f).as_deref() == Some(ext)).cloned();
    let (json, txt) = match (find("json"), find("txt")) {
        (Some(json), Some(txt)) => (json, txt),
        _ => {
            return Err(EtlError::InvalidContext(
                "un fichier .json et un fichier .txt sont attendus".to_string(),
            ));
        }
    };

    if json.file_stem() != txt.file_stem() {
        return Err(EtlError::FileNameMismatch {
            json: json.display().to_string(),
            txt: txt.display().to_string(),
        });
    }

    Ok((json, txt))
}

/// Identifiant du participant: nom de base jusqu'au premier `_`
///
/// `IND123456_dna` → `IND123456`.
pub fn participant_id_from_stem(stem: &str) -> String {
    stem.split('_').next().unwrap_or(stem).to_string()
}

fn absolute_results_path(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        return Ok(path.canonicalize()?);
    }
    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) if !parent.as_os_str().is_empty() => {
            Ok(parent.canonicalize()?.join(name))
        }
        (_, Some(name)) => Ok(std::env::current_dir()?.join(name)),
        _ => Err(EtlError::InvalidResultsPath(path.display().to_string())),
    }
}

/// Lit `input.json`, valide les chemins et localise les fichiers du participant
pub fn resolve_input(input_file: &Path) -> Result<ResolvedInput> {
    let descriptor = InputDescriptor::read(input_file)?;

    validate_context_path(&descriptor.context_path)?;
    validate_results_path(&descriptor.results_path)?;

    let context_path = descriptor.context_path.canonicalize()?;
    let (json_path, txt_path) = context_files(&context_path)?;

    let stem = json_path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| EtlError::InvalidContext(format!("nom de fichier illisible: {}", json_path.display())))?;
    let participant_id = participant_id_from_stem(stem);

    let resolved = ResolvedInput {
        results_path: absolute_results_path(&descriptor.results_path)?,
        context_path,
        json_path,
        txt_path,
        participant_id,
    };

    tracing::info!(
        participant = %resolved.participant_id,
        context = %resolved.context_path.display(),
        "Entrée résolue"
    );
    Ok(resolved)
}
