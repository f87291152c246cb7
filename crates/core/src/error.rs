#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("failed to initialise annotator: {0}")]
    AnnotatorInit(#[from] nlq_annotate::AnnotateError),
    #[error("invalid lexicon document: {0}")]
    LexiconYaml(#[from] serde_yaml::Error),
    #[error("invalid lexicon entry: {0}")]
    InvalidLexicon(String),
    #[error("invalid condition name: {0}")]
    InvalidConditionName(#[from] nlq_types::NameError),
}

pub type CoreResult<T> = std::result::Result<T, QueryError>;
