use waitlist_types::Waitlist;

pub const WAITLIST: Waitlist = Waitlist::new("members", "seats_filled", "max_seats");
