pub mod found_note;
