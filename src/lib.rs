pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    AnalysisDraft, AnalyzeCodeUseCase, ChatUseCase, CompletionClient, ANALYSIS_SYSTEM_PROMPT,
    ANALYSIS_TEMPERATURE, CHAT_SYSTEM_PROMPT, CHAT_TEMPERATURE,
};

pub use cli::Commands;

pub use connector::{
    CompletionConfig, Container, ContainerConfig, HttpCompletionClient, MockCompletionClient,
    Presenter, RecordedCall, Router,
};

pub use domain::{
    truncate_for_analysis, AnalysisPrompt, Conversation, DisplayResult, DomainError, Language,
    Message, Role, UploadedFile, MAX_ANALYSIS_CHARS, TRUNCATION_MARKER,
};
