mod invitation_status;
mod recurrence_type;
mod role;
mod todo;
