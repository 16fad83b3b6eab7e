pub mod audit_ledger_facade_impl;
