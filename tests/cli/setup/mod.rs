mod config_file_contract;
mod dry_run_writes_nothing_contract;
mod generates_stack_contract;
mod rejects_invalid_input_contract;
mod rerun_keeps_secrets_contract;
