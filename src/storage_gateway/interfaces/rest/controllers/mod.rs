pub mod storage_gateway_rest_controller;
