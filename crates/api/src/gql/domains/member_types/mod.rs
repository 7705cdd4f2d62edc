pub mod resolvers;

pub use resolvers::MemberTypeQuery;
