pub mod waitlist_minter_mock_messages;
