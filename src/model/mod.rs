/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// Entity keys and entity token models shared by several API modules
pub mod entity;
/// Transport trait and the reqwest backed HTTP dispatcher
pub mod http;
/// Request models for API calls
pub mod requests;
/// Response models and the PlayFab response envelope
pub mod responses;
