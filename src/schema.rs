table! {
    appointments (id) {
        id -> Unsigned<Bigint>,
        pid -> Unsigned<Bigint>,
        sid -> Char,
        cid -> Unsigned<Bigint>,
        date -> Date,
        start_time -> Time,
        end_time -> Time,
        kind -> Char,
        status -> Char,
        notes -> Nullable<Varchar>,
    }
}

table! {
    clinics (cid) {
        cid -> Unsigned<Bigint>,
        name -> Char,
        address -> Varchar,
    }
}

table! {
    patients (pid) {
        pid -> Unsigned<Bigint>,
        name -> Char,
        gender -> Char,
        birthday -> Nullable<Date>,
        telephone -> Char,
    }
}

table! {
    staff (sid) {
        sid -> Char,
        cid -> Unsigned<Bigint>,
        name -> Char,
        password -> Char,
        role -> Char,
    }
}

table! {
    staff_logins (token, sid, login_time) {
        token -> Char,
        sid -> Char,
        login_time -> Datetime,
    }
}

allow_tables_to_appear_in_same_query!(
    appointments,
    clinics,
    patients,
    staff,
    staff_logins,
);
