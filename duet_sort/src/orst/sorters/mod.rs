pub mod lomuto;
