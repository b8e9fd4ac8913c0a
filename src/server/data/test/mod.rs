mod brainstorm_session;
