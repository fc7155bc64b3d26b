//! Repository traits (ports) for the infrastructure layer to implement

mod repositories;

pub use repositories::{
    CategoryRepository, ContactFilter, ContactRepository, Page, PortfolioRepository, PostFilter,
    PostRepository, PostSort, PostSortColumn, RepoResult, SortDirection, SubscriberFilter,
    SubscriberRepository, TagRepository, UserRepository,
};
