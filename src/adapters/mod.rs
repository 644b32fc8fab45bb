pub mod assets;
pub mod docker_compose_command;
pub mod prompt_answers;
pub mod stack_filesystem;
pub mod static_answers;
