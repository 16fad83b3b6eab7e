pub mod storage_mediation_service;
