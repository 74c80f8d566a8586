pub mod settings_management;
