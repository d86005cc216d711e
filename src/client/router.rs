use dioxus::prelude::*;

use crate::client::component::{Layout, RequiresAdmin, RequiresLoggedIn};
use crate::client::route::{
    admin::{Admin, AdminSubmissions, AdminUsers},
    Business, Home, Login, MyPage, NotFound, Personal, PersonalComplete, Signup,
    SubmissionDetail,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},

        #[route("/business")]
        Business {},

        #[route("/login")]
        Login {},

        #[route("/signup")]
        Signup {},

        #[layout(RequiresLoggedIn)]
            #[route("/personal")]
            Personal {},

            #[route("/personal/complete")]
            PersonalComplete {},

            #[route("/mypage")]
            MyPage {},

            #[route("/mypage/:submission_id")]
            SubmissionDetail { submission_id: i64 },
        #[end_layout]

        #[layout(RequiresAdmin)]
        #[nest("/admin")]
            #[route("/")]
            Admin {},

            #[route("/users")]
            AdminUsers {},

            #[route("/submissions")]
            AdminSubmissions {},
        #[end_nest]
        #[end_layout]
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
