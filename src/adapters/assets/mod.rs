pub mod stack_assets_embedded;
