pub mod serialize;
pub mod topk;
