mod list_surfaces_feature_catalog_contract;
