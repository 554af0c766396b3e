pub mod integration_card;
