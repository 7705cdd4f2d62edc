pub mod resolvers;

pub use resolvers::SubscriberMutation;
