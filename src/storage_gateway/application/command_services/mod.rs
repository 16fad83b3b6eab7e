pub mod storage_mediation_service_impl;
